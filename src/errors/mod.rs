// BSD 3-Clause License
// Copyright (c) 2025, NØNOS - PUIENV
//! Application error types

mod business;

pub use business::{find_business_error, BusinessError, ErrorKind};
