/// Sentinel opening the comma-delimited per-request detail block.
pub const DETAIL_START_MARKER: &str = "---DETAILED_LATENCY_VS_SERVICE_TIME_DATA_START---";

/// Sentinel closing the detail block.
pub const DETAIL_END_MARKER: &str = "---DETAILED_LATENCY_VS_SERVICE_TIME_DATA_END---";

/// Per-request samples from one invocation: a header taken verbatim
/// from the simulator (at minimum `ServiceTime,Delay`) and one row per
/// simulated request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DetailTable {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl DetailTable {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum DetailState {
    /// No start marker seen yet.
    Outside,
    /// Start marker seen; the next line is the header.
    Header,
    /// Collecting rows until the end marker.
    Inside,
    /// End marker seen; only one block is expected per invocation.
    Done,
}

/// State machine for the sentinel-delimited detail section.
pub(super) struct DetailScan {
    state: DetailState,
    table: DetailTable,
}

impl DetailScan {
    pub(super) fn new() -> Self {
        Self {
            state: DetailState::Outside,
            table: DetailTable::default(),
        }
    }

    pub(super) fn feed(&mut self, line: &str) {
        match self.state {
            DetailState::Outside => {
                if line == DETAIL_START_MARKER {
                    self.state = DetailState::Header;
                }
            }
            DetailState::Header => {
                if line == DETAIL_END_MARKER {
                    self.state = DetailState::Done;
                    return;
                }
                self.table.header = split_csv(line);
                self.state = DetailState::Inside;
            }
            DetailState::Inside => {
                if line == DETAIL_END_MARKER {
                    self.state = DetailState::Done;
                    return;
                }
                let row = split_csv(line);
                if row.len() == self.table.header.len() {
                    self.table.rows.push(row);
                } else {
                    eprintln!(
                        "parser: detail row with {} fields, expected {}, skipping: {line}",
                        row.len(),
                        self.table.header.len()
                    );
                }
            }
            DetailState::Done => {}
        }
    }

    pub(super) fn finish(self) -> DetailTable {
        self.table
    }
}

fn split_csv(line: &str) -> Vec<String> {
    line.split(',').map(str::to_string).collect()
}
