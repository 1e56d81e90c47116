pub mod columns;
pub mod etl;
pub mod parse;
pub mod pipeline;
pub mod report;

pub use crate::domain::model::{FieldSpec, Record, TableData, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
