// Prompt constants for persona synthesis.

/// System prompt for the synthesis call — plain markdown out, no wrappers.
pub const SYNTHESIS_SYSTEM: &str = "You are an expert persona designer and audience analyst. \
    You produce well-structured markdown documents. \
    Respond with the persona document only. \
    Do NOT wrap the document in code fences. \
    Do NOT include preamble or commentary outside the document.";

/// Persona synthesis prompt template.
/// Replace: {profile_count}, {persona_name}, {profiles_summary}, {evidence}
pub const SYNTHESIS_PROMPT_TEMPLATE: &str = r#"Your task is to create a comprehensive, actionable persona based on public professional profiles of {profile_count} individuals.

# INPUT DATA

{profiles_summary}

# AGGREGATE EVIDENCE

The following frequency tables and data-quality score were computed across all profiles. Treat them as the statistical ground truth; the per-profile summaries above add color and nuance.

{evidence}

# YOUR TASK

Create a detailed composite persona named "{persona_name}" that represents the common patterns, behaviors, and characteristics across these individuals. This persona will be used to test content relevance and engagement potential.

# REQUIRED PERSONA STRUCTURE

Generate a well-formatted markdown document with the following sections:

## 1. PERSONA OVERVIEW
- **Name**: {persona_name}
- **Archetype**: A descriptive 2-3 word label (e.g., "Strategic Executive", "Technical Leader")
- **One-line Summary**: Concise description of who this persona represents

## 2. DEMOGRAPHICS & PROFESSIONAL PROFILE
- **Typical Roles/Titles**: List 3-5 common job titles
- **Industries**: Primary industries they work in
- **Company Sizes**: Startup, SMB, Enterprise, etc.
- **Career Stage**: Early career, mid-level, senior, executive
- **Geographic Distribution**: Regions or countries
- **Education Background**: Common degrees, institutions, or certifications

## 3. GOALS & MOTIVATIONS
- **Professional Goals**: What they're trying to achieve (3-5 bullets)
- **Personal Drivers**: What motivates them beyond work
- **Success Metrics**: How they measure success

## 4. PAIN POINTS & CHALLENGES
- **Primary Challenges**: Top 5 problems they face
- **Frustrations**: What causes them stress or friction
- **Resource Constraints**: Time, budget, knowledge gaps

## 5. BEHAVIORS & HABITS
- **Daily Routines**: How they structure their workday
- **Decision-Making Style**: Analytical, intuitive, collaborative, etc.
- **Information Consumption**: When and how they consume content
- **Technology Adoption**: Early adopter, pragmatist, conservative
- **Social Media Activity**: Platforms used, posting frequency, engagement style

## 6. COMMUNICATION PREFERENCES
- **Preferred Tone**: Formal, conversational, technical, storytelling
- **Content Formats**: Articles, videos, podcasts, infographics, case studies
- **Detail Level**: High-level overview, deep technical detail, balanced
- **Reading Time**: Short-form (2-3 min), medium (5-7 min), long-form (10+ min)
- **Trigger Words**: Language that resonates positively
- **Turn-offs**: Language or approaches to avoid

## 7. CONTENT ENGAGEMENT PATTERNS
- **Topics of Interest**: Top 10 subjects they care about
- **Content Discovery**: How they find new content (feeds, newsletters, search, recommendations)
- **Engagement Triggers**: What makes them like, comment, or share
- **Sharing Behavior**: When and why they share content with their network
- **Time Investment**: How much time they'll spend on content per session

## 8. PROFESSIONAL CONTEXT
- **Reporting Structure**: Who they report to, who reports to them
- **Buying Authority**: Decision maker, influencer, end user
- **Key Relationships**: Departments or roles they work closely with
- **Meeting Schedule**: Percentage of day in meetings vs focused work
- **Travel Frequency**: How often they travel for work

## 9. SKILLS & EXPERTISE
- **Core Competencies**: Top skills they possess
- **Knowledge Areas**: Domains where they're experts
- **Learning Priorities**: Skills they're actively developing
- **Thought Leadership**: Topics where they have strong opinions

## 10. CONTENT TESTING FRAMEWORK
- **Relevance Score**: Rate content 1-10 on: Does this solve their problem?
- **Engagement Score**: Rate content 1-10 on: Would they read, like, comment, or share?
- **Action Score**: Rate content 1-10 on: Would they take action (click, download, contact)?
- **Red Flags**: Content elements that would immediately turn them off
- **Green Flags**: Content elements that would immediately hook them

## 11. EXAMPLE CONTENT THAT RESONATES
- Provide 3-5 hypothetical headlines or content topics that would strongly appeal to this persona
- Explain WHY each would resonate

## 12. ANTI-PATTERNS
- List 5 things to NEVER do when creating content for this persona
- Explain the reasoning

# SYNTHESIS GUIDELINES

1. **Find Common Patterns**: Lean on the aggregate evidence tables for what is actually frequent
2. **Be Specific**: Use concrete details, not generic descriptions
3. **Stay Realistic**: Base insights on the supplied profile data, not assumptions
4. **Weigh the Confidence Score**: When data quality is low, hedge claims accordingly
5. **Include Nuance**: Note variations where they exist ("Some prefer X, while others Y")
6. **Make It Actionable**: Every section should help content creators make better decisions

# OUTPUT FORMAT

- Use clear markdown formatting
- Use bullet points for lists
- Use **bold** for emphasis
- Include specific examples where helpful
- Make it scannable and easy to reference

Generate the complete persona document now."#;
