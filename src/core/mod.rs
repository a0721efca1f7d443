pub mod errors;
pub mod row;
pub mod schema;

pub use errors::{Error, Result, ResultExt};
pub use row::{RespondentRow, Responses};
pub use schema::{FIELD_COUNT, GENDER_FIELD, IMS_FIELDS, SPDM_FIELDS, SURVEY_SCHEMA};
