mod common;
mod evaluation;
mod predicates;
