use serde::Serialize;

/// One of the garage's numbered spaces. Holds the bar code of the occupying
/// ticket, never the ticket itself; the garage owns the tickets.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParkingSpace {
    pub space_number: usize,
    pub bar_code: Option<String>,
}

impl ParkingSpace {
    pub fn vacant(space_number: usize) -> Self {
        Self {
            space_number,
            bar_code: None,
        }
    }

    pub fn is_free(&self) -> bool {
        self.bar_code.is_none()
    }
}
