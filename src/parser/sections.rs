use crate::tables::{
    EDUCATION_END, EDUCATION_START, EXPERIENCE_END, EXPERIENCE_START, PROJECTS_END, PROJECTS_START,
};
use crate::utils::contains_any;

/// Start and terminator keywords for one resume section.
#[derive(Debug, Clone, Copy)]
pub struct SectionSpec {
    pub kind: &'static str,
    pub start: &'static [&'static str],
    pub terminators: &'static [&'static str],
}

pub const EXPERIENCE: SectionSpec = SectionSpec {
    kind: "experience",
    start: EXPERIENCE_START,
    terminators: EXPERIENCE_END,
};

pub const EDUCATION: SectionSpec = SectionSpec {
    kind: "education",
    start: EDUCATION_START,
    terminators: EDUCATION_END,
};

pub const PROJECTS: SectionSpec = SectionSpec {
    kind: "projects",
    start: PROJECTS_START,
    terminators: PROJECTS_END,
};

/// Lines strictly after the first header line of `spec`, up to (not
/// including) the first line that names another section. `None` when no
/// header line exists; an empty slice when the header is immediately
/// followed by a terminator or the end of input.
pub fn find_segment<'a, 'b>(lines: &'a [&'b str], spec: &SectionSpec) -> Option<&'a [&'b str]> {
    let start = lines.iter().position(|l| contains_any(l, spec.start))?;
    let rest = &lines[start + 1..];
    let end = rest
        .iter()
        .position(|l| contains_any(l, spec.terminators))
        .unwrap_or(rest.len());
    Some(&rest[..end])
}
