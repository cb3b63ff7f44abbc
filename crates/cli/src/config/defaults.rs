// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Centralized default values for configuration.
//!
//! Individual config structs delegate to these constants via their `default_*` methods.

/// Default record store location and layout.
pub mod data {
    /// Default CSV path, relative to the working directory.
    pub const PATH: &str = "wwwroot/Testing.csv";

    /// Default header of the record identifier column.
    pub const ID_COLUMN: &str = "Id";

    /// Default header of the searchable text column.
    pub const VALUE_COLUMN: &str = "Value";
}

/// Default record generation parameters.
pub mod generate {
    /// Number of records written by `occurs generate`.
    pub const COUNT: usize = 100_000;

    /// Characters per generated value.
    pub const LENGTH: usize = 1000;

    /// Characters drawn from when generating values.
    pub const ALPHABET: &str = "AaBbCcDdEeFfGgHhIiJjKkLlMmNnOoPpQqRrSsTtUuVvWwXxYyZz0123456789 ";
}

/// Default search behavior.
pub mod search {
    /// Keywords match regardless of case.
    pub const IGNORE_CASE: bool = true;
}
