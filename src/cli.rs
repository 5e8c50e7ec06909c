use clap::Parser;

/// Fuzzy Match: rank documents by how well their tokens match a query.
#[derive(Parser)]
#[command(
    name = "tokmatch",
    about = "Determine the similarity of strings via weighted fuzzy token matching",
    version
)]
pub struct Cli {
    /// The string to search for
    #[arg(value_name = "input_string")]
    pub query: String,

    /// The string (or strings) to search in
    #[arg(value_name = "search_string", required = true, num_args = 1..)]
    pub documents: Vec<String>,

    /// The cutoff threshold for edit distance
    #[arg(short = 'm', long = "min_distance", default_value_t = 0.3)]
    pub min_distance: f64,

    /// Weight for substitution operation
    #[arg(short = 's', long = "sub_weight", default_value_t = 1.0)]
    pub sub_weight: f64,

    /// Weight for deletion operation
    #[arg(short = 'd', long = "del_weight", default_value_t = 1.0)]
    pub del_weight: f64,

    /// Weight for insertion operation
    #[arg(short = 'i', long = "ins_weight", default_value_t = 1.0)]
    pub ins_weight: f64,

    /// Weight for transposition operation (Levenshtein distance if 0)
    #[arg(short = 't', long = "trans_weight", default_value_t = 0.0)]
    pub trans_weight: f64,

    /// Emit matches as a JSON array instead of one line per match
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_documented_surface() {
        let cli = Cli::parse_from(["tokmatch", "query", "doc"]);
        assert_eq!(cli.min_distance, 0.3);
        assert_eq!(cli.sub_weight, 1.0);
        assert_eq!(cli.del_weight, 1.0);
        assert_eq!(cli.ins_weight, 1.0);
        assert_eq!(cli.trans_weight, 0.0);
        assert!(!cli.json);
    }

    #[test]
    fn accepts_multiple_documents_and_short_flags() {
        let cli = Cli::parse_from(["tokmatch", "q", "d1", "d2", "-m", "0.5", "-t", "1"]);
        assert_eq!(cli.documents, vec!["d1".to_string(), "d2".to_string()]);
        assert_eq!(cli.min_distance, 0.5);
        assert_eq!(cli.trans_weight, 1.0);
    }

    #[test]
    fn at_least_one_document_is_required() {
        assert!(Cli::try_parse_from(["tokmatch", "query"]).is_err());
    }
}
