use crate::NUMBER8;
use kb_columns::{define_table, Limit, SqlType};

define_table! {
    /// Calibration information for a station channel over a time interval.
    pub struct Sensor {
        table: "sensor",
        max_bytes: 91,
        primary_key: [sta, chan, time],
        unique_key: [],
        fields: {
            sta, set_sta, STA_NA: String = "", "%s", SqlType::Varchar2(6), Limit::MaxLen(6);
            chan, set_chan, CHAN_NA: String = "", "%s", SqlType::Varchar2(8), Limit::MaxLen(8);
            time, set_time, TIME_NA: f64 = crate::TIME_NA, "%1.5f", SqlType::Float(53), Limit::Unbounded;
            endtime, set_endtime, ENDTIME_NA: f64 = crate::ENDTIME_NA, "%1.5f", SqlType::Float(53), Limit::Unbounded;
            /// Instrument identifier.
            inid, set_inid, INID_NA: i64 = -1, "%d", SqlType::Number(8), NUMBER8;
            chanid, set_chanid, CHANID_NA: i64 = -1, "%d", SqlType::Number(8), NUMBER8;
            jdate, set_jdate, JDATE_NA: i64 = -1, "%d", SqlType::Number(8), NUMBER8;
            /// Calibration conversion ratio.
            calratio, set_calratio, CALRATIO_NA: f64 = 1.0, "%1.6f", SqlType::Float(24), Limit::Unbounded;
            /// Calibration period, in seconds.
            calper, set_calper, CALPER_NA: f64 = -1.0, "%1.6f", SqlType::Float(24), Limit::Unbounded;
            /// Correction for clock errors, in seconds.
            tshift, set_tshift, TSHIFT_NA: f64 = f64::NAN, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Snapshot indicator (`y` for a discrete calibration).
            instant, set_instant, INSTANT_NA: String = "", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
        }
    }
}
