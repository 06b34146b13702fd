use crate::SubmissionRecord;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ColumnKey {
    TaskId,
    ProverName,
    ProofSystem,
    Algorithm,
    SetupTime,
    WitnessGenerationTime,
    ProofGenerationTime,
    VerifyTime,
    PeakMemory,
    ProofSize,
}

impl ColumnKey {
    /// Field name in the submission payload. Task ID has no backing field.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ColumnKey::TaskId => None,
            ColumnKey::ProverName => Some("prover_name"),
            ColumnKey::ProofSystem => Some("proof_system"),
            ColumnKey::Algorithm => Some("algorithm"),
            ColumnKey::SetupTime => Some("setup_time"),
            ColumnKey::WitnessGenerationTime => Some("witness_generation_time"),
            ColumnKey::ProofGenerationTime => Some("proof_generation_time"),
            ColumnKey::VerifyTime => Some("verify_time"),
            ColumnKey::PeakMemory => Some("peak_memory"),
            ColumnKey::ProofSize => Some("proof_size"),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Header {
    Single(&'static str),
    TwoLine(&'static str, &'static str),
}

impl Header {
    pub fn lines(&self) -> Vec<&'static str> {
        match *self {
            Header::Single(title) => vec![title],
            Header::TwoLine(first, second) => vec![first, second],
        }
    }

    /// Header collapsed onto one line.
    pub fn text(&self) -> String {
        self.lines().join(" ")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Column {
    pub key: ColumnKey,
    pub header: Header,
    /// Fixed width in pixels.
    pub width: Option<u32>,
}

impl Column {
    const fn new(key: ColumnKey, header: Header, width: Option<u32>) -> Self {
        Self { key, header, width }
    }

    /// Render this column's cell. `index` is the row's zero-based position in
    /// the rendered page, not in the full list.
    pub fn cell(&self, record: &SubmissionRecord, index: usize) -> String {
        match self.key {
            ColumnKey::TaskId => (index + 1).to_string(),
            ColumnKey::ProverName => record.prover_name.clone(),
            ColumnKey::ProofSystem => record.proof_system.clone(),
            ColumnKey::Algorithm => record.algorithm.clone(),
            ColumnKey::SetupTime => format_number(record.setup_time),
            ColumnKey::WitnessGenerationTime => format_number(record.witness_generation_time),
            ColumnKey::ProofGenerationTime => format_number(record.proof_generation_time),
            ColumnKey::VerifyTime => format_number(record.verify_time),
            ColumnKey::PeakMemory => format_number(record.peak_memory),
            ColumnKey::ProofSize => format_number(record.proof_size),
        }
    }
}

/// Number text as a browser prints a JSON number: shortest digits, no
/// negative zero, and exponent form outside `[1e-6, 1e21)`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs();
    if magnitude >= 1e21 || magnitude < 1e-6 {
        let text = format!("{:e}", value);
        return match text.split_once('e') {
            Some((mantissa, exponent)) if !exponent.starts_with('-') => {
                format!("{mantissa}e+{exponent}")
            }
            _ => text,
        };
    }
    value.to_string()
}

pub const COLUMN_COUNT: usize = 10;

pub const SUBMISSION_COLUMNS: [Column; COLUMN_COUNT] = [
    Column::new(ColumnKey::TaskId, Header::Single("Task ID"), None),
    Column::new(ColumnKey::ProverName, Header::Single("Prover Name"), None),
    Column::new(ColumnKey::ProofSystem, Header::Single("Proof System"), None),
    Column::new(ColumnKey::Algorithm, Header::Single("Algorithm"), None),
    Column::new(
        ColumnKey::SetupTime,
        Header::Single("Setup time (seconds)"),
        Some(190),
    ),
    Column::new(
        ColumnKey::WitnessGenerationTime,
        Header::TwoLine("Witness generation", "time (seconds)"),
        Some(180),
    ),
    Column::new(
        ColumnKey::ProofGenerationTime,
        Header::TwoLine("Proof generation", "time (seconds)"),
        Some(200),
    ),
    Column::new(
        ColumnKey::VerifyTime,
        Header::TwoLine("Verification", "time (seconds)"),
        Some(180),
    ),
    Column::new(
        ColumnKey::PeakMemory,
        Header::Single("Peak memory (MB)"),
        Some(180),
    ),
    Column::new(
        ColumnKey::ProofSize,
        Header::Single("Proof size (KB)"),
        Some(150),
    ),
];

/// Render all ten cells of a row in column order.
pub fn render_cells(record: &SubmissionRecord, index: usize) -> [String; COLUMN_COUNT] {
    std::array::from_fn(|i| SUBMISSION_COLUMNS[i].cell(record, index))
}
