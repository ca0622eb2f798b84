use crate::core::codec::REGISTRY;
use crate::core::scorer::{score, ScoreBreakdown};
use crate::domain::model::{DecodeCandidate, Detection};

/// 依登錄順序嘗試所有編碼，只保留解碼成功的結果
pub fn rank_candidates(bytes: &[u8]) -> Vec<DecodeCandidate> {
    REGISTRY
        .iter()
        .filter_map(|entry| match entry.codec.decode(bytes) {
            Ok(text) => {
                let score = score(&text);
                tracing::trace!(
                    "{} decoded {} bytes, score {} ({:?})",
                    entry.codec,
                    bytes.len(),
                    score,
                    ScoreBreakdown::of(&text)
                );
                Some(DecodeCandidate {
                    codec: entry.codec,
                    text,
                    score,
                })
            }
            Err(e) => {
                tracing::trace!("{} skipped: {}", entry.codec, e);
                None
            }
        })
        .collect()
}

/// 取分數最高者；同分時保留最先出現的 (登錄順序)
pub fn pick_best(candidates: Vec<DecodeCandidate>) -> Option<DecodeCandidate> {
    candidates.into_iter().fold(None, |best, candidate| match best {
        Some(current) if current.score >= candidate.score => Some(current),
        _ => Some(candidate),
    })
}

pub fn smart_decode(bytes: &[u8]) -> Option<Detection> {
    let best = pick_best(rank_candidates(bytes))?;
    tracing::debug!("🔎 Best candidate: {} (score {})", best.codec, best.score);
    Some(Detection {
        encoding: best.codec,
        text: best.text,
        score: best.score,
    })
}
