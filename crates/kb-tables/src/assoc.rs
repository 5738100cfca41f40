use crate::NUMBER9;
use kb_columns::{define_table, Limit, SqlType};

define_table! {
    /// Data associating arrivals with origins.
    pub struct Assoc {
        table: "assoc",
        max_bytes: 152,
        primary_key: [arid, orid],
        unique_key: [],
        fields: {
            arid, set_arid, ARID_NA: i64 = i64::MIN, "%d", SqlType::Number(9), NUMBER9;
            orid, set_orid, ORID_NA: i64 = i64::MIN, "%d", SqlType::Number(9), NUMBER9;
            sta, set_sta, STA_NA: String = "", "%s", SqlType::Varchar2(6), Limit::MaxLen(6);
            /// Associated phase.
            phase, set_phase, PHASE_NA: String = "-", "%s", SqlType::Varchar2(8), Limit::MaxLen(8);
            /// Phase identification confidence, 0 to 1.
            belief, set_belief, BELIEF_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Source-receiver distance, in degrees.
            delta, set_delta, DELTA_NA: f64 = -1.0, "%1.3f", SqlType::Float(24), Limit::Unbounded;
            /// Station-to-event azimuth.
            seaz, set_seaz, SEAZ_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Event-to-station azimuth.
            esaz, set_esaz, ESAZ_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            timeres, set_timeres, TIMERES_NA: f64 = -999.0, "%1.3f", SqlType::Float(24), Limit::Unbounded;
            timedef, set_timedef, TIMEDEF_NA: String = "-", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            azres, set_azres, AZRES_NA: f64 = -999.0, "%1.1f", SqlType::Float(24), Limit::Unbounded;
            azdef, set_azdef, AZDEF_NA: String = "-", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            slores, set_slores, SLORES_NA: f64 = -999.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            slodef, set_slodef, SLODEF_NA: String = "-", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            emares, set_emares, EMARES_NA: f64 = -999.0, "%1.1f", SqlType::Float(24), Limit::Unbounded;
            /// Location weight.
            wgt, set_wgt, WGT_NA: f64 = -1.0, "%1.3f", SqlType::Float(24), Limit::Unbounded;
            /// Velocity model.
            vmodel, set_vmodel, VMODEL_NA: String = "-", "%s", SqlType::Varchar2(15), Limit::MaxLen(15);
            commid, set_commid, COMMID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
        }
    }
}
