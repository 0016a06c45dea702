const FALLBACK_MIME: &str = "application/octet-stream";

pub fn infer_mime(file_name: &str) -> &'static str {
    let Some((_, ext)) = file_name.rsplit_once('.') else {
        return FALLBACK_MIME;
    };
    match ext.to_ascii_lowercase().as_str() {
        "md" | "markdown" => "text/markdown",
        "txt" | "log" => "text/plain",
        "csv" => "text/csv",
        "json" => "application/json",
        "yaml" | "yml" => "application/yaml",
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "svg" => "image/svg+xml",
        "pptx" => "application/vnd.openxmlformats-officedocument.presentationml.presentation",
        "docx" => "application/vnd.openxmlformats-officedocument.wordprocessingml.document",
        "xlsx" => "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        "zip" => "application/zip",
        _ => FALLBACK_MIME,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_mime_uses_last_extension_case_insensitively() {
        assert_eq!(infer_mime("slides.final.PDF"), "application/pdf");
        assert_eq!(infer_mime("notes.md"), "text/markdown");
    }

    #[test]
    fn infer_mime_falls_back_for_unknown_or_missing_extension() {
        assert_eq!(infer_mime("Makefile"), FALLBACK_MIME);
        assert_eq!(infer_mime("dump.bin"), FALLBACK_MIME);
    }
}
