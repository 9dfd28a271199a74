//! Persona prompt assembly.
//!
//! Renders a [`FetchResult`] into the document sent to the generation
//! service: a fixed instruction preamble, a POSTS section, a COMMENTS
//! section, and a closing request for headed output. Output is a pure
//! function of the input; record order is preserved.

use std::fmt::Write as _;

use personagen_types::persona::PersonaDocument;
use personagen_types::record::FetchResult;

pub const POSTS_HEADER: &str = "### POSTS ###";
pub const COMMENTS_HEADER: &str = "### COMMENTS ###";

/// Instruction preamble placed before the rendered records.
const PERSONA_INSTRUCTIONS: &str = "You are a social psychologist analyzing a Reddit user. Based on the text below, generate a detailed user persona. Include:
- Name (guessed or pseudonym), Age range, Gender (if inferable)
- Interests and Hobbies
- Political/Religious views (if any)
- Personality traits
- Communication style
- Occupation or Educational background (if inferred)
- Citations from posts/comments for each point

";

/// Closing line placed after the rendered records.
const PERSONA_CLOSING: &str = "\n---\nGenerate the persona as structured text with headings.";

/// Render the posts and comments sections.
///
/// Every entry ends with its absolute source URL (`link_base` + permalink).
/// Empty sections still emit their header.
pub fn render_records(result: &FetchResult, link_base: &str) -> String {
    let mut out = String::new();

    out.push_str(POSTS_HEADER);
    out.push('\n');
    for post in &result.posts {
        let _ = write!(
            out,
            "- {}\n{}\n(Source: {})\n\n",
            post.title,
            post.body,
            post.source_url(link_base)
        );
    }

    out.push('\n');
    out.push_str(COMMENTS_HEADER);
    out.push('\n');
    for comment in &result.comments {
        let _ = write!(
            out,
            "- {}\n(Source: {})\n\n",
            comment.body,
            comment.source_url(link_base)
        );
    }

    out
}

/// Build the full persona document for a fetch result.
pub fn build_persona_document(result: &FetchResult, link_base: &str) -> PersonaDocument {
    let records = render_records(result, link_base);

    let mut text =
        String::with_capacity(PERSONA_INSTRUCTIONS.len() + records.len() + PERSONA_CLOSING.len());
    text.push_str(PERSONA_INSTRUCTIONS);
    text.push_str(&records);
    text.push_str(PERSONA_CLOSING);

    PersonaDocument::new(text)
}
