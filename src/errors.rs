
error_chain! {
    types {
        Error, ErrorKind, ResultExt, Result;
    }

    foreign_links {
        Fmt(::std::fmt::Error);
        Io(::std::io::Error);
        Json(::serde_json::Error);
    }

    errors {
        InvalidSigma(sigma: f64) {
            description("Invalid sigma"),
            display("Invalid sigma: {} (must be finite and > 0)", sigma),
        }
        DegenerateNormalization(sum: f64) {
            description("Degenerate normalization"),
            display("Degenerate normalization: weighted sum of raw values is {}", sum),
        }
        TableMismatch(values: usize, multiplicities: usize) {
            description("Table mismatch"),
            display("Table mismatch: {} raw values but {} multiplicities",
                    values, multiplicities),
        }
    }
}
