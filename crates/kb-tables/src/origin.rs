use crate::{NUMBER4, NUMBER8, NUMBER9};
use kb_columns::{define_table, Limit, SqlType};

define_table! {
    /// Information describing a derived or reported origin for an event.
    pub struct Origin {
        table: "origin",
        max_bytes: 219,
        primary_key: [orid],
        unique_key: [lat, lon, depth, time, auth],
        fields: {
            /// Latitude, in degrees north.
            lat, set_lat, LAT_NA: f64 = -999.0, "%1.6f", SqlType::Float(53), Limit::Unbounded;
            /// Longitude, in degrees east.
            lon, set_lon, LON_NA: f64 = -999.0, "%1.6f", SqlType::Float(53), Limit::Unbounded;
            /// Source depth, in kilometers.
            depth, set_depth, DEPTH_NA: f64 = -999.0, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            /// Epoch origin time, in seconds.
            time, set_time, TIME_NA: f64 = crate::TIME_NA, "%1.5f", SqlType::Float(53), Limit::Unbounded;
            orid, set_orid, ORID_NA: i64 = i64::MIN, "%d", SqlType::Number(9), NUMBER9;
            evid, set_evid, EVID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
            jdate, set_jdate, JDATE_NA: i64 = -1, "%d", SqlType::Number(8), NUMBER8;
            /// Number of associated arrivals.
            nass, set_nass, NASS_NA: i64 = -1, "%d", SqlType::Number(4), NUMBER4;
            /// Number of time-defining phases.
            ndef, set_ndef, NDEF_NA: i64 = -1, "%d", SqlType::Number(4), NUMBER4;
            /// Number of depth phases.
            ndp, set_ndp, NDP_NA: i64 = -1, "%d", SqlType::Number(4), NUMBER4;
            /// Geographic region number.
            grn, set_grn, GRN_NA: i64 = -1, "%d", SqlType::Number(8), NUMBER8;
            /// Seismic region number.
            srn, set_srn, SRN_NA: i64 = -1, "%d", SqlType::Number(8), NUMBER8;
            etype, set_etype, ETYPE_NA: String = "-", "%s", SqlType::Varchar2(7), Limit::MaxLen(7);
            /// Depth estimated from depth phases.
            depdp, set_depdp, DEPDP_NA: f64 = -999.0, "%1.4f", SqlType::Float(24), Limit::Unbounded;
            /// Depth determination flag.
            dtype, set_dtype, DTYPE_NA: String = "-", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            mb, set_mb, MB_NA: f64 = -999.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            mbid, set_mbid, MBID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
            ms, set_ms, MS_NA: f64 = -999.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            msid, set_msid, MSID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
            ml, set_ml, ML_NA: f64 = -999.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            mlid, set_mlid, MLID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
            /// Location algorithm.
            algorithm, set_algorithm, ALGORITHM_NA: String = "-", "%s", SqlType::Varchar2(15), Limit::MaxLen(15);
            auth, set_auth, AUTH_NA: String = "-", "%s", SqlType::Varchar2(20), Limit::MaxLen(20);
            commid, set_commid, COMMID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
        }
    }
}
