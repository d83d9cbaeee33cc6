use serde::{Serialize, Serializer};

/// Aggregate statistics over every record of a FASTA file.
///
/// The field order and names are the report shape written to standard output.
/// `min_len` is `None` until the first record is added and is written as `-1`
/// while unset.
#[derive(Serialize, Debug, Default, Clone, PartialEq)]
pub struct FastaStats {
    #[serde(serialize_with = "serialize_min_len")]
    pub min_len: Option<usize>,
    pub max_len: usize,
    pub mean_len: f64,
    pub tot_len: usize,
    pub num_records: usize,
    pub count_a: usize,
    pub count_c: usize,
    pub count_g: usize,
    pub count_t: usize,
}

fn serialize_min_len<S: Serializer>(min_len: &Option<usize>, s: S) -> Result<S::Ok, S::Error> {
    match min_len {
        Some(v) => s.serialize_u64(*v as u64),
        None => s.serialize_i64(-1),
    }
}

impl FastaStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds one completed record into the aggregate.
    ///
    /// # Arguments
    ///
    /// * `seq` - The full sequence of the record, with every fragment line concatenated
    ///   and line terminators removed.
    pub fn add_record(&mut self, seq: &[u8]) {
        let len = seq.len();

        self.num_records += 1;
        self.tot_len += len;

        self.min_len = match self.min_len {
            Some(min) if min <= len => Some(min),
            _ => Some(len),
        };

        if len > self.max_len {
            self.max_len = len;
        }

        for base in seq {
            match base {
                b'A' | b'a' => self.count_a += 1,
                b'C' | b'c' => self.count_c += 1,
                b'G' | b'g' => self.count_g += 1,
                b'T' | b't' => self.count_t += 1,
                _ => {}
            }
        }
    }

    /// Computes `mean_len` once the whole input has been consumed. The mean is left
    /// at zero if no records were seen.
    pub fn finalize(&mut self) {
        if self.num_records > 0 {
            self.mean_len = self.tot_len as f64 / self.num_records as f64;
        }
    }
}
