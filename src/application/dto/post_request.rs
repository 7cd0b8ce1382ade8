// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::domain::models::post::PostDraft;
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Deserialize, Serialize, Validate)]
pub struct GeneratePostRequestDto {
    #[validate(length(min = 1, message = "Topic cannot be empty"))]
    pub topic: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratePostResponseDto {
    pub topic: String,
    pub news_sources: Vec<String>,
    pub linkedin_post: String,
    pub image_suggestion: Option<String>,
}

impl From<PostDraft> for GeneratePostResponseDto {
    fn from(draft: PostDraft) -> Self {
        Self {
            topic: draft.topic.into_inner(),
            news_sources: draft.news_sources,
            linkedin_post: draft.linkedin_post,
            image_suggestion: draft.image_suggestion,
        }
    }
}
