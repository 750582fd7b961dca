use marktag::rules::ANSI_RESET;
use marktag::{
    segment, to_html, to_html_with_options, to_html_with_rules, DelimiterRule, InlineTagger,
    Options, DEFAULT_RULES,
};

#[test]
fn bold() {
    let result = to_html("this is **bold** text").unwrap();
    assert_eq!(result, "<p>this is <b>bold</b> text</p>\n");
}

#[test]
fn italic() {
    let result = to_html("_it_").unwrap();
    assert_eq!(result, "<p><i>it</i></p>\n");
}

#[test]
fn inline_code() {
    let result = to_html("use `cargo` here").unwrap();
    assert_eq!(result, "<p>use <tt>cargo</tt> here</p>\n");
}

#[test]
fn fenced_code_on_one_line() {
    let result = to_html("```let x = 1;```").unwrap();
    assert_eq!(result, "<p><pre>let x = 1;</pre></p>\n");
}

#[test]
fn fence_is_opaque() {
    let result = to_html("```a **b** _c_ `d` e```").unwrap();
    assert_eq!(result, "<p><pre>a **b** _c_ `d` e</pre></p>\n");
}

#[test]
fn code_span_wraps_bold() {
    let result = to_html("`bold **test** text`").unwrap();
    assert_eq!(result, "<p><tt>bold <b>test</b> text</tt></p>\n");
}

#[test]
fn code_span_wraps_italic() {
    let result = to_html("`a _b_ c`").unwrap();
    assert_eq!(result, "<p><tt>a <i>b</i> c</tt></p>\n");
}

#[test]
fn italic_wraps_bold() {
    let result = to_html("_a **b** c_").unwrap();
    assert_eq!(result, "<p><i>a <b>b</b> c</i></p>\n");
}

#[test]
fn pairs_in_document_order() {
    let result = to_html("**a** and **b**").unwrap();
    assert_eq!(result, "<p><b>a</b> and <b>b</b></p>\n");
}

#[test]
fn every_rule_at_once() {
    let result = to_html("**a** _b_ `c` ```d```").unwrap();
    assert_eq!(
        result,
        "<p><b>a</b> <i>b</i> <tt>c</tt> <pre>d</pre></p>\n"
    );
}

#[test]
fn intraword_underscore_is_text() {
    let result = to_html("snake_case_name").unwrap();
    assert_eq!(result, "<p>snake_case_name</p>\n");
}

#[test]
fn isolated_markers_are_text() {
    let result = to_html("2 * 3 ** 4 _ 5").unwrap();
    assert_eq!(result, "<p>2 * 3 ** 4 _ 5</p>\n");
}

#[test]
fn fence_between_words_is_text() {
    let result = to_html("wrap code in ``` fences").unwrap();
    assert_eq!(result, "<p>wrap code in ``` fences</p>\n");

    let result = to_html("use ** for bold").unwrap();
    assert_eq!(result, "<p>use ** for bold</p>\n");
}

#[test]
fn fence_between_words_leaves_later_fences_alone() {
    let result = to_html("type ``` then ```x```").unwrap();
    assert_eq!(result, "<p>type ``` then <pre>x</pre></p>\n");
}

#[test]
fn marker_runs_of_other_lengths_are_text() {
    let result = to_html("***x*** __y__ ``z``").unwrap();
    assert_eq!(result, "<p>***x*** __y__ ``z``</p>\n");
}

#[test]
fn tabs_count_as_whitespace() {
    let result = to_html("a\t_b_\tc").unwrap();
    assert_eq!(result, "<p>a\t<i>b</i>\tc</p>\n");
}

#[test]
fn unicode_content() {
    let result = to_html("**héllo** wörld").unwrap();
    assert_eq!(result, "<p><b>héllo</b> wörld</p>\n");
}

#[test]
fn multi_line_fence_spans_paragraphs() {
    let result = to_html("```\r\nfn main() {}\r\n```").unwrap();
    assert_eq!(result, "<p><pre></p>\n<p>fn main() {}</p>\n<p></pre></p>\n");
}

#[test]
fn multi_line_fence_hides_markers() {
    let result = to_html("```\r\n**not bold**\r\n```\r\n**bold**").unwrap();
    assert_eq!(
        result,
        "<p><pre></p>\n<p>**not bold**</p>\n<p></pre></p>\n<p><b>bold</b></p>\n"
    );
}

#[test]
fn text_is_raw_by_default() {
    let result = to_html("1 < 2 & **3 > 2**").unwrap();
    assert_eq!(result, "<p>1 < 2 & <b>3 > 2</b></p>\n");
}

#[test]
fn text_escaping_is_optional() {
    let options = Options {
        escape_html: true,
        ..Options::default()
    };
    let result = to_html_with_options("1 < 2 & **3 > 2**", &options).unwrap();
    assert_eq!(result, "<p>1 &lt; 2 &amp; <b>3 &gt; 2</b></p>\n");
}

#[test]
fn custom_rule_table() {
    let strike = DelimiterRule {
        marker: "~~",
        tag: "del",
        ansi_open: "\x1b[9m",
        ansi_close: ANSI_RESET,
        opaque: false,
    };
    let rules = [strike, DEFAULT_RULES[1]];
    let result = to_html_with_rules("a ~~b~~ **c** _d_", &rules, &Options::default()).unwrap();
    assert_eq!(result, "<p>a <del>b</del> <b>c</b> _d_</p>\n");
}

#[test]
fn tagged_document_counts_spans() {
    let doc = segment("**a** _b_ **c** ```x _d_ y```");
    let tagged = InlineTagger::with_default_rules().tag(&doc).unwrap();
    assert_eq!(tagged.span_count("**"), 2);
    assert_eq!(tagged.span_count("_"), 1);
    assert_eq!(tagged.span_count("```"), 1);
    assert_eq!(tagged.span_count("`"), 0);
    assert_eq!(tagged.suppressed(), 2);
}
