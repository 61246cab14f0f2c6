mod catalog;
mod scenarios;
