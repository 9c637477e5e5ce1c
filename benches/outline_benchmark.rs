//! Benchmarks for ocroutline classification performance.
//!
//! Run with: cargo bench
//!
//! These benchmarks use synthetic hOCR pages; no external OCR tool is run.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use ocroutline::outline::{build_outline, HeadingClassifier};
use ocroutline::parser::{candidates_from_hocr, LineSelector};
use ocroutline::PageCandidates;

/// Creates a synthetic hOCR page with the given number of lines.
fn create_test_page(line_count: usize) -> String {
    let mut content = String::new();

    content.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    content.push_str("<html xmlns=\"http://www.w3.org/1999/xhtml\"><body>\n");
    content.push_str("<div class='ocr_page' title='bbox 0 0 1700 2200'>\n");

    for i in 0..line_count {
        let (size, text) = match i % 10 {
            0 => (22, format!("Chapter {}", i / 10 + 1)),
            1 => (16, format!("{}. Overview", i % 9 + 1)),
            2 => (13, format!("{}.{} Details", i % 9 + 1, i % 7 + 1)),
            3 => (10, "Copyright 2024 Example Corp.".to_string()),
            _ => (11, format!("Body text line {} with ordinary content.", i)),
        };
        content.push_str(&format!(
            "<span class='ocr_line' id='line_1_{i}' title='bbox 100 {y} 1600 {h}; baseline 0 -6; x_size {size}; x_descenders 5; x_ascenders 6'>\
             <span class='ocrx_word' title='bbox 100 {y} 400 {h}; x_wconf 93'>{text}</span></span>\n",
            y = i * 30,
            h = i * 30 + 25,
        ));
    }

    content.push_str("</div></body></html>\n");
    content
}

/// Benchmark hOCR parsing into candidates at various sizes.
fn bench_candidate_extraction(c: &mut Criterion) {
    let mut group = c.benchmark_group("candidate_extraction");

    for line_count in [10, 100, 500].iter() {
        let page = create_test_page(*line_count);

        group.bench_function(format!("{}_lines", line_count), |b| {
            b.iter(|| candidates_from_hocr(black_box(&page), LineSelector::OcrLine).unwrap());
        });
    }

    group.finish();
}

/// Benchmark heading classification and outline assembly.
fn bench_outline_assembly(c: &mut Criterion) {
    let classifier = HeadingClassifier::new();
    let pages: Vec<PageCandidates> = (1..=50)
        .map(|n| {
            let candidates =
                candidates_from_hocr(&create_test_page(60), LineSelector::OcrLine).unwrap();
            PageCandidates::new(n, candidates)
        })
        .collect();

    c.bench_function("outline_50_pages", |b| {
        b.iter(|| build_outline(&classifier, black_box(&pages)));
    });
}

criterion_group!(benches, bench_candidate_extraction, bench_outline_assembly);
criterion_main!(benches);
