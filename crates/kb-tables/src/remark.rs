use crate::{NUMBER8, NUMBER9};
use kb_columns::{define_table, Limit, SqlType};

define_table! {
    /// Free-form comments attached to rows of other tables through `commid`. Long comments
    /// span several rows distinguished by `lineno`.
    pub struct Remark {
        table: "remark",
        max_bytes: 100,
        primary_key: [commid, lineno],
        unique_key: [],
        fields: {
            /// Comment identifier.
            commid, set_commid, COMMID_NA: i64 = i64::MIN, "%d", SqlType::Number(9), NUMBER9;
            /// Line number of this row within the comment.
            lineno, set_lineno, LINENO_NA: i64 = i64::MIN, "%d", SqlType::Number(8), NUMBER8;
            remark, set_remark, REMARK_NA: String = "-", "%s", SqlType::Varchar2(80), Limit::MaxLen(80);
        }
    }
}
