use pretty_assertions::assert_eq;
use rstest::*;

use slideshow_widget::bootstrap::{init_all, start};
use slideshow_widget::dom::{MemoryDocument, SlideshowNodes};
use slideshow_widget::gesture::Point;
use slideshow_widget::platform::Platform;
use slideshow_widget::widget::activate;
use slideshow_widget::Config;

fn page(attributes: &[(&str, &str)]) -> (MemoryDocument, SlideshowNodes) {
    let doc = MemoryDocument::new();
    let nodes = doc.insert_slideshow(&Config::default().markers, attributes);
    (doc, nodes)
}

fn debug() -> Config {
    Config::default().with_debug(true)
}

#[test]
fn test_compact_example_navigation() {
    let (doc, nodes) = page(&[("data-files", "a.svg,b.svg,c.svg")]);
    assert_eq!(init_all(&doc, &Config::default()), 1);

    assert_eq!(doc.src(nodes.image), "a.svg");
    assert_eq!(doc.alt(nodes.image), "Slide 1");
    assert_eq!(doc.text(nodes.total), "3");

    doc.click(nodes.next);
    assert_eq!(doc.src(nodes.image), "b.svg");
    assert_eq!(doc.alt(nodes.image), "Slide 2");
    assert_eq!(doc.text(nodes.count), "2");

    doc.click(nodes.next);
    assert_eq!(doc.src(nodes.image), "c.svg");
    doc.click(nodes.next);
    assert_eq!(doc.src(nodes.image), "a.svg");
    assert_eq!(doc.text(nodes.count), "1");
}

#[test]
fn test_structured_example() {
    let (doc, nodes) = page(&[("data-slides", r#"[{"src":"/x.svg"}]"#)]);
    assert_eq!(init_all(&doc, &debug()), 1);
    assert_eq!(doc.src(nodes.image), "/x.svg");
    assert_eq!(doc.alt(nodes.image), "Slide 1");
    assert_eq!(doc.text(nodes.total), "1");
    assert!(doc.alerts().is_empty());
    assert!(doc.preloads().is_empty());
}

#[test]
fn test_malformed_structured_reports_and_stays_inert() {
    let (doc, nodes) = page(&[("data-slides", "not json")]);
    assert_eq!(init_all(&doc, &debug()), 0);

    let alerts = doc.alerts();
    assert_eq!(alerts.len(), 2);
    assert!(alerts[0].starts_with("[slideshow] Invalid JSON in data-slides"));
    assert_eq!(alerts[1], "[slideshow] No slides available for this slideshow instance.");

    assert_eq!(doc.src(nodes.image), "");
    assert_eq!(doc.listener_count(nodes.container, "keydown"), 0);
    assert_eq!(doc.listener_count(nodes.next, "click"), 0);
}

#[rstest]
#[case(&[], "[slideshow] No data-files or data-slides attribute found on slideshow wrapper")]
#[case(&[("data-files", "")], "[slideshow] data-files is present but empty")]
#[case(&[("data-slides", "[]")], "[slideshow] data-slides parsed but is empty or not an array")]
#[case(&[("data-slides", "{\"src\":\"a.svg\"}")], "[slideshow] data-slides parsed but is empty or not an array")]
fn test_configuration_problems_are_distinguished(
    #[case] attributes: &[(&str, &str)],
    #[case] first_alert: &str,
) {
    let (doc, nodes) = page(attributes);
    assert_eq!(init_all(&doc, &debug()), 0);
    assert_eq!(doc.alerts()[0], first_alert);
    assert_eq!(doc.src(nodes.image), "");
}

#[test]
fn test_filtered_structured_list_reports_no_slides_only() {
    let (doc, _) = page(&[("data-slides", r#"[{"alt":"no src"}]"#)]);
    assert_eq!(init_all(&doc, &debug()), 0);
    assert_eq!(doc.alerts(), vec!["[slideshow] No slides available for this slideshow instance."]);
}

#[test]
fn test_missing_image_element() {
    let config = debug();
    let doc = MemoryDocument::new();
    let container = doc.create_element(None, &["ukpa-slideshow"]);
    doc.set_attribute(container, "data-files", "a.svg,b.svg");
    let next = doc.create_element(Some(container), &["ukpa-slide-next"]);

    assert_eq!(init_all(&doc, &config), 0);
    assert_eq!(doc.alerts(), vec!["[slideshow] Missing .ukpa-slide-img inside slideshow wrapper"]);
    assert_eq!(doc.listener_count(next, "click"), 0);
    assert!(doc.preloads().is_empty());
}

#[test]
fn test_no_containers() {
    let doc = MemoryDocument::new();
    doc.create_element(None, &["something-else"]);
    assert_eq!(init_all(&doc, &debug()), 0);
    assert_eq!(doc.alerts(), vec!["[slideshow] No .ukpa-slideshow elements found on this page"]);
}

#[test]
fn test_alerts_only_in_debug_mode() {
    let (doc, _) = page(&[("data-slides", "not json")]);
    assert_eq!(init_all(&doc, &Config::default()), 0);
    assert!(doc.alerts().is_empty());
}

#[test]
fn test_broken_container_does_not_block_others() {
    let config = debug();
    let doc = MemoryDocument::new();
    let broken = doc.insert_slideshow(&config.markers, &[("data-slides", "not json")]);
    let working = doc.insert_slideshow(&config.markers, &[("data-files", "one.png,two.png")]);
    let also_working = doc.insert_slideshow(&config.markers, &[("data-files", "x.png")]);

    assert_eq!(init_all(&doc, &config), 2);
    assert_eq!(doc.src(broken.image), "");
    assert_eq!(doc.src(working.image), "one.png");
    assert_eq!(doc.src(also_working.image), "x.png");

    // Instances are independent
    doc.click(working.next);
    assert_eq!(doc.src(working.image), "two.png");
    assert_eq!(doc.src(also_working.image), "x.png");
}

#[test]
fn test_keyboard_navigation() {
    let (doc, nodes) = page(&[("data-files", "a.svg,b.svg,c.svg")]);
    init_all(&doc, &Config::default());
    assert_eq!(doc.tab_index(nodes.container), Some(0));

    assert!(doc.key_down(nodes.container, "ArrowLeft"));
    assert_eq!(doc.src(nodes.image), "c.svg");
    assert!(doc.key_down(nodes.container, "ArrowRight"));
    assert_eq!(doc.src(nodes.image), "a.svg");
    assert!(doc.key_down(nodes.container, " "));
    assert!(doc.key_down(nodes.container, "Enter"));
    assert_eq!(doc.src(nodes.image), "c.svg");

    // Other keys keep their default action and do nothing
    assert!(!doc.key_down(nodes.container, "Tab"));
    assert!(!doc.key_down(nodes.container, "ArrowDown"));
    assert_eq!(doc.src(nodes.image), "c.svg");
}

#[rstest]
#[case::swipe_left(Point::new(200.0, 100.0), Point::new(120.0, 110.0), "b.svg")]
#[case::swipe_right(Point::new(120.0, 100.0), Point::new(200.0, 110.0), "d.svg")]
#[case::tap(Point::new(50.0, 50.0), Point::new(50.0, 50.0), "b.svg")]
#[case::vertical_scroll(Point::new(100.0, 300.0), Point::new(140.0, 50.0), "b.svg")]
#[case::short_right(Point::new(100.0, 100.0), Point::new(129.0, 100.0), "b.svg")]
fn test_touch_navigation(#[case] start: Point, #[case] end: Point, #[case] expected: &str) {
    let (doc, nodes) = page(&[("data-files", "a.svg,b.svg,c.svg,d.svg")]);
    init_all(&doc, &Config::default());

    doc.touch_start(nodes.container, start);
    doc.touch_end(nodes.container, end);
    assert_eq!(doc.src(nodes.image), expected);
}

#[test]
fn test_advance_and_retreat_cycle() {
    let files = "1.png,2.png,3.png,4.png,5.png";
    let (doc, nodes) = page(&[("data-files", files)]);
    let slideshow = activate(&doc, &Config::default(), &nodes.container).unwrap();

    doc.click(nodes.next);
    let start = slideshow.borrow().index();
    for _ in 0..5 {
        doc.click(nodes.next);
    }
    assert_eq!(slideshow.borrow().index(), start);
    for _ in 0..5 {
        doc.key_down(nodes.container, "ArrowLeft");
    }
    assert_eq!(slideshow.borrow().index(), start);
    assert_eq!(doc.src(nodes.image), "2.png");
}

#[test]
fn test_preloads_all_but_first() {
    let (doc, _) = page(&[("data-base", "/img"), ("data-files", "a.svg, /b.svg ,c.svg")]);
    init_all(&doc, &Config::default());
    assert_eq!(doc.preloads(), vec!["/b.svg", "/img/c.svg"]);
}

#[test]
fn test_image_error_reports_without_changing_state() {
    let (doc, nodes) = page(&[("data-base", "/slides/"), ("data-files", "a.svg,b.svg")]);
    let slideshow = activate(&doc, &debug(), &nodes.container).unwrap();
    doc.click(nodes.next);

    doc.image_error(nodes.image);
    assert_eq!(doc.alerts(), vec!["[slideshow] Image failed to load: /slides/b.svg"]);
    assert_eq!(slideshow.borrow().index(), 1);

    doc.click(nodes.next);
    assert_eq!(doc.src(nodes.image), "/slides/a.svg");
}

#[test]
fn test_custom_markers() {
    let config = Config::from_json(
        r#"{"markers": {"container": "deck", "image": "deck-img", "next": "deck-next"}}"#,
    )
    .unwrap();
    let doc = MemoryDocument::new();
    let container = doc.create_element(None, &["deck"]);
    doc.set_attribute(container, "data-files", "p.png,q.png");
    let image = doc.create_element(Some(container), &["deck-img"]);
    let next = doc.create_element(Some(container), &["deck-next"]);

    assert_eq!(init_all(&doc, &config), 1);
    doc.click(next);
    assert_eq!(doc.src(image), "q.png");
}

#[test]
fn test_start_defers_until_loaded() {
    let doc = MemoryDocument::loading();
    let nodes = doc.insert_slideshow(&Config::default().markers, &[("data-files", "a.svg")]);

    start(doc.clone(), Config::default());
    assert!(doc.is_loading());
    assert_eq!(doc.src(nodes.image), "");

    doc.finish_loading();
    assert_eq!(doc.src(nodes.image), "a.svg");
}

#[test]
fn test_start_runs_immediately_when_loaded() {
    let (doc, nodes) = page(&[("data-files", "a.svg")]);
    start(doc.clone(), Config::default());
    assert_eq!(doc.src(nodes.image), "a.svg");
}
