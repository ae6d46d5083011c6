// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! # Unified Error Handling System
//!
//! HTTP-facing error types live in `calorie_ml_core::errors` and are
//! re-exported here together with the per-request and startup taxonomies.

pub use crate::inference::InferenceError;
pub use crate::predictors::{ModelError, StartupError};
pub use calorie_ml_core::errors::{AppError, ErrorCode, ErrorResponse};
pub use calorie_ml_core::mapping::MappingMismatch;
