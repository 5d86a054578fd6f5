// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Crate-level error type
//!
//! Each module owns its own error enum; `EditorError` is what the
//! controller and the front-ends see.

use thiserror::Error;

use crate::core::ValidationError;
use crate::file::FileError;

#[derive(Debug, Error)]
pub enum EditorError {
    /// Input was not a usable dictionary document. The previous document
    /// is still loaded.
    #[error("Failed to read dictionary: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    File(#[from] FileError),
}
