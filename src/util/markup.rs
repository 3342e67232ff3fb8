/// Convert an Azure DevOps rich-text (HTML) field to Markdown.
pub fn html_to_markdown(html: &str) -> std::io::Result<String> {
    htmd::convert(html).map(|md| md.trim().to_string())
}
