// LLM prompt constants for the resume analysis module.
// The schema block must stay in sync with `analysis::schema`.

/// Resume analysis prompt template. Replace `{resume_text}` before sending.
/// Asks for every field of `ResumeAnalysisOutput` as a flat JSON object.
pub const RESUME_ANALYSIS_PROMPT_TEMPLATE: &str = r#"You are an expert resume analyzer and career counselor.
Analyze the following resume text and extract structured information.
You MUST respond with valid JSON only. Do NOT include any text outside the JSON object.

Resume Text:
{resume_text}

Please analyze this resume thoroughly and provide:
1. Complete personal information extraction
2. Professional summary/objective
3. Core technical skills
4. Soft skills
5. Detailed work experience with specific responsibilities
6. Education background
7. Professional certifications
8. Overall resume rating (1-10 scale)
9. Specific improvement areas
10. Targeted upskilling suggestions based on current role and industry trends

Be specific and detailed in your analysis. Focus on:
- Quantifiable achievements where mentioned
- Skills relevance to current job market
- Experience progression and career growth
- Areas lacking that are important for the candidate's field
- Specific technologies, tools, or skills to learn for career advancement

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "full name of the candidate",
  "email": "email address",
  "phone": "phone number",
  "location": "location or address",
  "professional_summary": "professional summary or objective",
  "core_skills": ["technical skill"],
  "soft_skills": ["soft skill"],
  "work_experience": [
    {"company": "...", "position": "...", "duration": "...", "responsibilities": ["..."]}
  ],
  "education": [
    {"institution": "...", "degree": "...", "year": "..."}
  ],
  "certifications": ["certification name"],
  "resume_rating": 7.5,
  "improvement_areas": ["area for improvement"],
  "upskill_suggestions": ["specific upskilling recommendation"]
}"#;
