use crate::NUMBER9;
use kb_columns::{define_table, Limit, SqlType};

define_table! {
    /// Summary of confidence bounds in origin estimates. `sxx` through `stz` are elements of
    /// the location covariance matrix.
    pub struct Origerr {
        table: "origerr",
        max_bytes: 152,
        primary_key: [orid],
        unique_key: [],
        fields: {
            orid, set_orid, ORID_NA: i64 = i64::MIN, "%d", SqlType::Number(18), Limit::Unbounded;
            sxx, set_sxx, SXX_NA: f64 = crate::TIME_NA, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            syy, set_syy, SYY_NA: f64 = crate::TIME_NA, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            szz, set_szz, SZZ_NA: f64 = crate::TIME_NA, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            stt, set_stt, STT_NA: f64 = crate::TIME_NA, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            sxy, set_sxy, SXY_NA: f64 = crate::TIME_NA, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            sxz, set_sxz, SXZ_NA: f64 = crate::TIME_NA, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            syz, set_syz, SYZ_NA: f64 = crate::TIME_NA, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            stx, set_stx, STX_NA: f64 = crate::TIME_NA, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            sty, set_sty, STY_NA: f64 = crate::TIME_NA, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            stz, set_stz, STZ_NA: f64 = crate::TIME_NA, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            /// Standard error of one observation.
            sdobs, set_sdobs, SDOBS_NA: f64 = -1.0, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            /// Semi-major axis of the error ellipse, in kilometers.
            smajax, set_smajax, SMAJAX_NA: f64 = -1.0, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            /// Semi-minor axis of the error ellipse, in kilometers.
            sminax, set_sminax, SMINAX_NA: f64 = -1.0, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            /// Strike of the semi-major axis, in degrees clockwise from north.
            strike, set_strike, STRIKE_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            sdepth, set_sdepth, SDEPTH_NA: f64 = crate::TIME_NA, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            stime, set_stime, STIME_NA: f64 = -1.0, "%1.3f", SqlType::Float(24), Limit::Unbounded;
            /// Confidence level of the error bounds.
            conf, set_conf, CONF_NA: f64 = -1.0, "%1.3f", SqlType::Float(24), Limit::Unbounded;
            commid, set_commid, COMMID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
        }
    }
}
