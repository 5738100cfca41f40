use crate::{NUMBER10, NUMBER8, NUMBER9};
use kb_columns::{define_table, Limit, SqlType};

define_table! {
    /// Waveform file header and descriptive information: where the samples of one channel
    /// segment live on disk and how to read them.
    pub struct Wfdisc {
        table: "wfdisc",
        max_bytes: 240,
        primary_key: [wfid],
        unique_key: [sta, chan, time],
        fields: {
            sta, set_sta, STA_NA: String = "", "%s", SqlType::Varchar2(6), Limit::MaxLen(6);
            chan, set_chan, CHAN_NA: String = "", "%s", SqlType::Varchar2(8), Limit::MaxLen(8);
            /// Epoch time of the first sample.
            time, set_time, TIME_NA: f64 = f64::NAN, "%1.5f", SqlType::Float(53), Limit::Unbounded;
            /// Waveform identifier.
            wfid, set_wfid, WFID_NA: i64 = i64::MIN, "%d", SqlType::Number(9), NUMBER9;
            chanid, set_chanid, CHANID_NA: i64 = -1, "%d", SqlType::Number(8), NUMBER8;
            jdate, set_jdate, JDATE_NA: i64 = -1, "%d", SqlType::Number(8), NUMBER8;
            /// Epoch time of the last sample.
            endtime, set_endtime, ENDTIME_NA: f64 = crate::ENDTIME_NA, "%1.5f", SqlType::Float(53), Limit::Unbounded;
            /// Number of samples.
            nsamp, set_nsamp, NSAMP_NA: i64 = i64::MIN, "%d", SqlType::Number(8), NUMBER8;
            /// Sampling rate, in samples per second.
            samprate, set_samprate, SAMPRATE_NA: f64 = f64::NAN, "%1.7f", SqlType::Float(24), Limit::Unbounded;
            /// Nominal calibration, in nanometers per digital count.
            calib, set_calib, CALIB_NA: f64 = 1.0, "%1.6f", SqlType::Float(24), Limit::Unbounded;
            calper, set_calper, CALPER_NA: f64 = -1.0, "%1.6f", SqlType::Float(24), Limit::Unbounded;
            /// Instrument code.
            instype, set_instype, INSTYPE_NA: String = "-", "%s", SqlType::Varchar2(6), Limit::MaxLen(6);
            /// Indexing method.
            segtype, set_segtype, SEGTYPE_NA: String = "-", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            /// Numeric storage format of the samples, e.g. `s4` or `t4`.
            datatype, set_datatype, DATATYPE_NA: String = "-", "%s", SqlType::Varchar2(2), Limit::MaxLen(2);
            clip, set_clip, CLIP_NA: String = "-", "%s", SqlType::Varchar2(1), Limit::MaxLen(1);
            /// Directory of the waveform file.
            dir, set_dir, DIR_NA: String = "", "%s", SqlType::Varchar2(64), Limit::MaxLen(64);
            /// Name of the waveform file.
            dfile, set_dfile, DFILE_NA: String = "", "%s", SqlType::Varchar2(32), Limit::MaxLen(32);
            /// Byte offset of the first sample within the file.
            foff, set_foff, FOFF_NA: i64 = i64::MIN, "%d", SqlType::Number(10), NUMBER10;
            commid, set_commid, COMMID_NA: i64 = -1, "%d", SqlType::Number(9), NUMBER9;
        }
    }
}
