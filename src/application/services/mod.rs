pub mod seo_prompt;
