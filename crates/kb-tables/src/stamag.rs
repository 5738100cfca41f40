use crate::NUMBER9;
use kb_columns::{define_table, Limit, SqlType};

define_table! {
    /// Station magnitude estimates and their contribution to a network magnitude.
    pub struct Stamag {
        table: "stamag",
        max_bytes: 160,
        primary_key: [magid, ampid, sta, arid, phase, auth],
        unique_key: [],
        fields: {
            /// Network magnitude identifier.
            magid, set_magid, MAGID_NA: i64 = i64::MIN, "%d", SqlType::Number(9), NUMBER9;
            ampid, set_ampid, AMPID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
            sta, set_sta, STA_NA: String = "", "%s", SqlType::Varchar2(6), Limit::MaxLen(6);
            arid, set_arid, ARID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
            orid, set_orid, ORID_NA: i64 = i64::MIN, "%d", SqlType::Number(9), NUMBER9;
            evid, set_evid, EVID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
            phase, set_phase, PHASE_NA: String = "-", "%s", SqlType::Varchar2(8), Limit::MaxLen(8);
            delta, set_delta, DELTA_NA: f64 = -1.0, "%1.3f", SqlType::Float(24), Limit::Unbounded;
            /// Magnitude type (`mb`, `ms`, `ml`, ...).
            magtype, set_magtype, MAGTYPE_NA: String = "", "%s", SqlType::Varchar2(6), Limit::MaxLen(6);
            magnitude, set_magnitude, MAGNITUDE_NA: f64 = -999.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            uncertainty, set_uncertainty, UNCERTAINTY_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Station magnitude residual.
            magres, set_magres, MAGRES_NA: f64 = -999.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Whether this station contributed to the network magnitude.
            magdef, set_magdef, MAGDEF_NA: String = "-", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            /// Magnitude model.
            mmodel, set_mmodel, MMODEL_NA: String = "-", "%s", SqlType::Varchar2(15), Limit::MaxLen(15);
            auth, set_auth, AUTH_NA: String = "-", "%s", SqlType::Varchar2(20), Limit::MaxLen(20);
            commid, set_commid, COMMID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
        }
    }
}
