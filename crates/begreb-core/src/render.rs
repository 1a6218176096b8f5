use begreb_types::{Card, Node, SearchPost};

/// Build the result box for one post
pub fn render_card(post: &SearchPost) -> Card {
    Card {
        english: post.english.clone(),
        danish: post.danish.clone(),
        source: post.source.clone(),
    }
}

/// Nodes for a whole response: one card per post, or the placeholder when empty
pub fn render_posts(posts: &[SearchPost]) -> Vec<Node> {
    if posts.is_empty() {
        return vec![Node::placeholder()];
    }

    posts.iter().map(|post| Node::Card(render_card(post))).collect()
}
