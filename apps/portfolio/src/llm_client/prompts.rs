// System instruction for the portfolio assistant.
// The whole content record is embedded so the model answers from it alone.

use crate::content::Profile;

const ASSISTANT_TEMPLATE: &str = "\
You are an AI Assistant for {name}'s portfolio website.
Your goal is to answer questions about {name}'s professional experience, skills, education, certifications, and projects in a friendly, professional, and concise manner.

Here is the context about {name}:
{profile_json}

Rules:
1. Always stay in character as a helpful portfolio assistant.
2. Keep answers brief (under 100 words) unless asked for details.
3. If asked about something not in the resume, politely say you don't have that information but suggest contacting {name} directly at {email}.
4. Do not invent information.
5. You can use emojis sparingly.
";

/// Builds the fixed system instruction for every conversation session.
pub fn build_system_instruction(profile: &Profile) -> String {
    // Profile only holds strings, lists and plain enums; serialization cannot fail.
    let profile_json = serde_json::to_string_pretty(profile).unwrap_or_default();

    // record goes in last so braces inside it are left alone
    ASSISTANT_TEMPLATE
        .replace("{name}", &profile.name)
        .replace("{email}", &profile.contact.email)
        .replace("{profile_json}", &profile_json)
}

/// First assistant message shown in every new chat panel.
pub fn greeting(profile: &Profile) -> String {
    format!(
        "Hi! I am {}'s AI Assistant. Ask me anything about their work, skills, or experience.",
        profile.name
    )
}
