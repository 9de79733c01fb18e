mod common;
mod minimum_income;
