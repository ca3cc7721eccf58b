pub const PSTASH_CLI: &str = "pstash-cli";
