pub const SYSTEM_PROMPT: &str = "You are a Vue migration assistant. Reply only with a valid JSON \
array of migration suggestions and never add text outside the JSON.";

pub fn user_prompt(content: &str) -> String {
    format!(
        r#"Review the following Vue.js component for a migration from Vue 2 to Vue 3.
Reply with ONLY a JSON array. Every element must have exactly this shape:
{{
  "issue": "what must change",
  "severity": "high|medium|low",
  "location": "where in the code it occurs",
  "before": "the current code",
  "after": "the migrated code",
  "explanation": "why the change is needed"
}}

If nothing needs to change, reply with an empty array: []

Component:
```vue
{content}
```"#
    )
}
