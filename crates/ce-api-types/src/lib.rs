//! Shared request and response types for the Cloud Elements platform REST API.
//!
//! The structs mirror the JSON documents the platform returns. They are
//! intentionally lenient: every field defaults when absent so partially
//! populated responses still decode, and empty values are skipped on encode
//! so request bodies only carry what the caller set.

pub mod accounts;
pub mod branding;
pub mod common_resources;
pub mod elements;
pub mod formulas;
pub mod instances;
pub mod jobs;
pub mod metadata;
pub mod transformations;

pub use accounts::{Account, AccountStatusRequest, SignupRequest};
pub use branding::BrandingConfig;
pub use common_resources::{CommonResource, ResourceField};
pub use elements::{
    Element, ElementAuthentication, ElementConfiguration, ElementResource, InstanceTransformation,
};
pub use instances::{ElementInstance, InstanceUser, TransformationData};
pub use formulas::{
    ExecutionStatusRequest, Formula, FormulaConfiguration, FormulaInstance,
    FormulaInstanceConfig, FormulaInstanceCreationResponse, FormulaInstanceExecution, Step,
    Trigger,
};
pub use jobs::{Job, JobData, JobRequest, JobRequestTrigger, JobTrigger};
pub use metadata::{Metadata, PollType};
pub use transformations::{
    AccountElement, Transformation, TransformationConfiguration, TransformationField,
    TransformationScript,
};

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}

#[allow(clippy::trivially_copy_pass_by_ref)]
pub(crate) fn is_zero(value: &i64) -> bool {
    *value == 0
}
