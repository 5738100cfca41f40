use crate::{NUMBER8, NUMBER9};
use kb_columns::{define_table, Limit, SqlType};

define_table! {
    /// Summary information on seismic arrivals: a phase pick on one station channel.
    pub struct Arrival {
        table: "arrival",
        max_bytes: 215,
        primary_key: [arid],
        unique_key: [sta, time, chan, iphase, auth],
        fields: {
            /// Station code.
            sta, set_sta, STA_NA: String = "-", "%s", SqlType::Varchar2(6), Limit::MaxLen(6);
            /// Epoch time of the arrival, in seconds.
            time, set_time, TIME_NA: f64 = crate::TIME_NA, "%1.5f", SqlType::Float(53), Limit::Unbounded;
            /// Arrival identifier.
            arid, set_arid, ARID_NA: i64 = i64::MIN, "%d", SqlType::Number(9), Limit::Unbounded;
            /// Julian date, `yyyyddd`.
            jdate, set_jdate, JDATE_NA: i64 = -1, "%d", SqlType::Number(8), NUMBER8;
            /// Station-association identifier.
            stassid, set_stassid, STASSID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
            chanid, set_chanid, CHANID_NA: i64 = -1, "%d", SqlType::Number(8), NUMBER8;
            chan, set_chan, CHAN_NA: String = "-", "%s", SqlType::Varchar2(8), Limit::MaxLen(8);
            /// Phase name reported by the analyst or detector.
            iphase, set_iphase, IPHASE_NA: String = "-", "%s", SqlType::Varchar2(8), Limit::MaxLen(8);
            /// Signal type.
            stype, set_stype, STYPE_NA: String = "-", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            /// Uncertainty of `time`, in seconds.
            deltim, set_deltim, DELTIM_NA: f64 = -1.0, "%1.3f", SqlType::Float(24), Limit::Unbounded;
            /// Observed azimuth, in degrees.
            azimuth, set_azimuth, AZIMUTH_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            delaz, set_delaz, DELAZ_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Observed slowness, in seconds per degree.
            slow, set_slow, SLOW_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            delslo, set_delslo, DELSLO_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Emergence angle, in degrees.
            ema, set_ema, EMA_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Signal rectilinearity.
            rect, set_rect, RECT_NA: f64 = -1.0, "%1.3f", SqlType::Float(24), Limit::Unbounded;
            amp, set_amp, AMP_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            per, set_per, PER_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            logat, set_logat, LOGAT_NA: f64 = -999.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            clip, set_clip, CLIP_NA: String = "-", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            /// First motion.
            fm, set_fm, FM_NA: String = "-", "%s", SqlType::Varchar2(2), Limit::MaxLen(2);
            snr, set_snr, SNR_NA: f64 = -1.0, "%1.2f", SqlType::Float(24), Limit::Unbounded;
            /// Onset quality.
            qual, set_qual, QUAL_NA: String = "-", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            auth, set_auth, AUTH_NA: String = "-", "%s", SqlType::Varchar2(20), Limit::MaxLen(20);
            commid, set_commid, COMMID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
        }
    }
}
