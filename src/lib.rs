//! Localized content narration for VoiceForAll.
//!
//! The core is the [`narration::NarrationManager`], which keeps at most one
//! item speaking at a time, together with the [`localization::LocalizationStore`]
//! (persisted current language) and the [`i18n::TranslationCatalog`]
//! (pre-authored strings with english fallback).

pub mod config;
pub mod db;
pub mod i18n;
pub mod localization;
pub mod metrics;
pub mod narration;
pub mod retry;
pub mod speech;
