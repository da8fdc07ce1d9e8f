use netgraph_core::format::OutputFormat;
use netgraph_core::EulerStrategy;

/// Parse output format from string
pub fn parse_output_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse Eulerian construction strategy from string
pub fn parse_strategy(s: &str) -> std::result::Result<EulerStrategy, String> {
    s.parse::<EulerStrategy>()
}
