#![allow(dead_code)]

use kb_columns::{define_table, Limit, SqlType};

define_table! {
    /// Three-column table used across the codec tests.
    pub struct Sample {
        table: "sample",
        max_bytes: 28,
        primary_key: [id],
        unique_key: [name],
        fields: {
            id, set_id, ID_NA: i64 = -1, "%d", SqlType::Number(9), Limit::Below(1_000_000_000);
            name, set_name, NAME_NA: String = "-", "%s", SqlType::Varchar2(8), Limit::MaxLen(8);
            value, set_value, VALUE_NA: f64 = -999.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
        }
    }
}

define_table! {
    /// Same shape as `Sample` under another table name.
    pub struct Other {
        table: "other",
        max_bytes: 28,
        primary_key: [id],
        unique_key: [],
        fields: {
            id, set_id, ID_NA: i64 = -1, "%d", SqlType::Number(9), Limit::Unbounded;
            name, set_name, NAME_NA: String = "", "%s", SqlType::Varchar2(8), Limit::Unbounded;
            value, set_value, VALUE_NA: f64 = f64::NAN, "%1.2f", SqlType::Float(24), Limit::Unbounded;
        }
    }
}

pub fn sample() -> Sample {
    Sample::new(7, "abc", 1.5)
}
