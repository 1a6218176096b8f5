fn main() {
    slint_build::compile("ui/search.slint").expect("failed to compile ui/search.slint");
}
