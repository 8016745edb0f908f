//! The fixed prompt template sent to the documentation collaborator.

/// Renders the documentation prompt for one code snippet.
///
/// The code is embedded verbatim; the instructions ask for a profile of the
/// snippet's data flow and its control logic, kept concise, with a direct
/// tone and varied sentence length.
#[must_use]
pub fn documentation_prompt(code: &str) -> String {
    format!(
        "Profile the following code in a detailed manner. Understand how data \
         moves through it and how its logic works.\n\n\
         {code}\n\n\
         - Highlight the data flow of the code. Keep it easy to read and concise.\n\
         - Highlight the logic and how the code works. Keep it easy to read and concise.\n\
         - For the tone: vary sentence length, be direct and to the point."
    )
}
