//! Schema-driven field validation
//!
//! A [`FormSchema`] is an ordered list of [`FieldSpec`]s, each carrying
//! ordered [`Rule`]s, plus [`CrossFieldRule`]s evaluated after every field
//! passed. [`validate`] is a pure function of schema and values.

mod engine;
mod rule;
mod schema;
mod value;

pub use engine::{validate, ValidationResult};
pub use rule::{Check, Rule, ValuePredicate};
pub use schema::{
    CrossFieldRule, FieldSpec, FormSchema, FormSchemaBuilder, RecordPredicate, SchemaError,
};
pub use value::{FieldErrors, FieldKind, FieldValue, FieldValues, Record};
