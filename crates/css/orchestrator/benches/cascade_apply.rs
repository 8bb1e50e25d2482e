use criterion::{Criterion, criterion_group, criterion_main};
use css_orchestrator::{CssContext, PrimaryOrder};
use css_properties::{PropertyList, PropertyName};
use css_selectors::Selector;
use doctree::{DoctreeNode, DocumentTree};
use std::hint::black_box;

/// Author sheet with a few hundred class rules, most of which miss.
fn build_context() -> CssContext {
    let mut context = CssContext::new();
    for index in 0..300i64 {
        let mut props = PropertyList::new();
        props.set(PropertyName::Color, index);
        props.set(PropertyName::MarginLeft, index * 2);
        context.add(
            Selector::universal().with_class(&format!("c{index}")),
            props.into_shared(),
            PrimaryOrder::Author,
        );
    }
    context
}

fn build_tree() -> DocumentTree {
    let mut tree = DocumentTree::new();
    tree.push(DoctreeNode::for_tag("html"));
    tree.push(DoctreeNode::for_tag("body"));
    tree.push(DoctreeNode::for_tag("div").with_class_attribute("c7 c150 c299"));
    tree
}

fn bench_cascade_apply(criterion: &mut Criterion) {
    let context = build_context();
    let tree = build_tree();
    let mut inline = PropertyList::new();
    inline.set(PropertyName::FontSize, 12i64);

    criterion.bench_function("cascade_apply_div", |bencher| {
        bencher.iter(|| {
            let mut props = PropertyList::new();
            context.apply(&mut props, &tree, Some(&inline), None);
            black_box(props.len())
        });
    });
}

criterion_group!(cascade_benches, bench_cascade_apply);
criterion_main!(cascade_benches);
