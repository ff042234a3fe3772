mod integration;
mod substitution;
