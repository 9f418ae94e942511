mod common;
mod engines;
mod properties;
mod scenarios;
