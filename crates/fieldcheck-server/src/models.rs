//! Request bodies accepted by the server.
//!
//! Missing JSON keys decode to the zero value of the field, so an omitted
//! `name` is reported as `is required` rather than as a decode failure.

use fieldcheck::Validate;
use serde::{Deserialize, Serialize};

/// Body of `POST /profile`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Profile {
    #[validate("required")]
    pub name: String,
    #[validate("required,min=1")]
    pub age: i64,
}

/// Body of `POST /avengers`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct Avenger {
    #[validate("required,minLen=3,maxLen=50")]
    pub name: String,
    #[validate("required,min=18,max=100")]
    pub age: i64,
    #[validate("required,email")]
    pub email: String,
    #[validate("maxLen=20")]
    pub rank: String,
    #[validate("min=1")]
    pub missions: i64,
}
