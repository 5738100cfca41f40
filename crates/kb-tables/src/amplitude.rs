use crate::NUMBER9;
use kb_columns::{define_table, Limit, SqlType};

define_table! {
    /// Amplitude measurements made on a waveform, optionally tied to an arrival.
    pub struct Amplitude {
        table: "amplitude",
        max_bytes: 157,
        primary_key: [ampid],
        unique_key: [arid, chan, per, amptime, time, duration, deltaf, amptype, auth],
        fields: {
            /// Amplitude identifier.
            ampid, set_ampid, AMPID_NA: i64 = i64::MIN, "%d", SqlType::Number(9), NUMBER9;
            /// Arrival the amplitude was measured for.
            arid, set_arid, ARID_NA: i64 = i64::MIN, "%d", SqlType::Number(9), NUMBER9;
            /// Parametric identifier.
            parid, set_parid, PARID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
            chan, set_chan, CHAN_NA: String = "", "%s", SqlType::Varchar2(8), Limit::MaxLen(8);
            /// Measured amplitude, in `units`.
            amp, set_amp, AMP_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Period of the measured signal, in seconds.
            per, set_per, PER_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            snr, set_snr, SNR_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Epoch time of the amplitude measure.
            amptime, set_amptime, AMPTIME_NA: f64 = crate::TIME_NA, "%1.5f", SqlType::Float(53), Limit::Unbounded;
            /// Start of the measurement window.
            time, set_time, TIME_NA: f64 = crate::TIME_NA, "%1.5f", SqlType::Float(53), Limit::Unbounded;
            /// Length of the measurement window, in seconds.
            duration, set_duration, DURATION_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Width of the frequency band.
            deltaf, set_deltaf, DELTAF_NA: f64 = -1.0, "%1.3f", SqlType::Float(24), Limit::Unbounded;
            amptype, set_amptype, AMPTYPE_NA: String = "-", "%s", SqlType::Varchar2(8), Limit::MaxLen(8);
            units, set_units, UNITS_NA: String = "", "%s", SqlType::Varchar2(15), Limit::MaxLen(15);
            /// Clipped-data flag.
            clip, set_clip, CLIP_NA: String = "-", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            /// Whether the amplitude was measured for an arrival (`y`/`n`).
            inarrival, set_inarrival, INARRIVAL_NA: String = "", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            auth, set_auth, AUTH_NA: String = "-", "%s", SqlType::Varchar2(20), Limit::MaxLen(20);
        }
    }
}
