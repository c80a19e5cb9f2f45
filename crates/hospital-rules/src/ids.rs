/// Prefix of generated patient identifiers
pub const PATIENT_ID_PREFIX: &str = "PAT";

/// `PAT` followed by the first four digest bytes as upper-case hex.
pub fn patient_id_from_digest(digest: &[u8]) -> String {
    let hex: String = digest
        .iter()
        .take(4)
        .map(|b| format!("{:02X}", b))
        .collect();
    format!("{}{}", PATIENT_ID_PREFIX, hex)
}

pub fn is_valid_patient_id(id: &str) -> bool {
    id.len() == PATIENT_ID_PREFIX.len() + 8
        && id.starts_with(PATIENT_ID_PREFIX)
        && id[PATIENT_ID_PREFIX.len()..]
            .chars()
            .all(|c| c.is_ascii_digit() || ('A'..='F').contains(&c))
}
