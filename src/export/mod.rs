//! Mehrseitiger PDF-Export: Snapshot-Capturer, Seiten-Assembler und der
//! frame-getriebene Export-Job.

pub mod capture;
pub mod job;
pub mod pdf;

pub use capture::{drain_captures, CapturedFrame};
pub use job::{drive, ExportJob, ExportOutcome};
pub use pdf::{page_height_mm, PageAssembler};
