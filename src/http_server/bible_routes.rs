//! Bible HTTP Routes
//!
//! Read-only endpoints over the loaded translations. Book names in paths
//! are percent-decoded by the extractor and normalized by the translation.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use serde::Serialize;

use crate::bible::{LookupResult, TranslationSummary};

use super::errors::ApiResult;
use super::state::AppState;

// ==================
// Response Types
// ==================

#[derive(Debug, Serialize)]
pub struct TranslationsResponse {
    pub translations: Vec<TranslationSummary>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct BooksResponse {
    pub translation: String,
    pub books: Vec<String>,
    pub total: usize,
}

#[derive(Debug, Serialize)]
pub struct BookResponse {
    pub translation: String,
    pub book: String,
    pub chapter_count: usize,
    pub chapters: Vec<u32>,
}

#[derive(Debug, Serialize)]
pub struct VerseEntry {
    pub verse: u32,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ChapterResponse {
    pub translation: String,
    pub book: String,
    pub chapter: u32,
    pub verse_count: usize,
    pub verses: Vec<VerseEntry>,
}

#[derive(Debug, Serialize)]
pub struct VerseResponse {
    pub translation: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

// ==================
// Bible Routes
// ==================

/// Create bible routes
pub fn bible_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/translations", get(list_translations_handler))
        .route("/translations/:translation/books", get(list_books_handler))
        .route("/translations/:translation/books/:book", get(get_book_handler))
        .route(
            "/translations/:translation/books/:book/chapters/:chapter",
            get(get_chapter_handler),
        )
        .route(
            "/translations/:translation/books/:book/chapters/:chapter/verses/:verse",
            get(get_verse_handler),
        )
        .with_state(state)
}

// ==================
// Handlers
// ==================

async fn list_translations_handler(
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<TranslationsResponse>> {
    let translations = state.track(Ok(state.registry().summaries()))?;

    Ok(Json(TranslationsResponse {
        total: translations.len(),
        translations,
    }))
}

async fn list_books_handler(
    State(state): State<Arc<AppState>>,
    Path(translation): Path<String>,
) -> ApiResult<Json<BooksResponse>> {
    let books = state.track(state.registry().get(&translation).map(|store| {
        store
            .list_book_names()
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    }))?;

    Ok(Json(BooksResponse {
        translation,
        total: books.len(),
        books,
    }))
}

async fn get_book_handler(
    State(state): State<Arc<AppState>>,
    Path((translation, book)): Path<(String, String)>,
) -> ApiResult<Json<BookResponse>> {
    let (canonical, chapters) = state.track(state.registry().get(&translation).and_then(
        |store| -> LookupResult<_> {
            let chapters = store.chapter_numbers(&book)?;
            Ok((store.normalize_book(&book), chapters))
        },
    ))?;

    Ok(Json(BookResponse {
        translation,
        book: canonical,
        chapter_count: chapters.len(),
        chapters,
    }))
}

async fn get_chapter_handler(
    State(state): State<Arc<AppState>>,
    Path((translation, book, chapter)): Path<(String, String, u32)>,
) -> ApiResult<Json<ChapterResponse>> {
    let (canonical, verses) = state.track(state.registry().get(&translation).and_then(
        |store| -> LookupResult<_> {
            let verses: Vec<VerseEntry> = store
                .get_chapter(&book, chapter)?
                .into_iter()
                .map(|(verse, text)| VerseEntry {
                    verse,
                    text: text.to_string(),
                })
                .collect();
            Ok((store.normalize_book(&book), verses))
        },
    ))?;

    Ok(Json(ChapterResponse {
        translation,
        book: canonical,
        chapter,
        verse_count: verses.len(),
        verses,
    }))
}

async fn get_verse_handler(
    State(state): State<Arc<AppState>>,
    Path((translation, book, chapter, verse)): Path<(String, String, u32, u32)>,
) -> ApiResult<Json<VerseResponse>> {
    let (canonical, text) = state.track(state.registry().get(&translation).and_then(
        |store| -> LookupResult<_> {
            let text = store.get_verse(&book, chapter, verse)?.to_string();
            Ok((store.normalize_book(&book), text))
        },
    ))?;

    Ok(Json(VerseResponse {
        translation,
        book: canonical,
        chapter,
        verse,
        text,
    }))
}
