use super::Params;

/// Build the ordered lookup keys for `params`, most specific first.
///
/// Index 0 is always the empty join of zero components. It never matches
/// but keeps its slot. After it come the dist+group, dist, group and os
/// tiers; each tier tries the prefixed form before the bare one.
pub fn candidate_keys(params: &Params) -> Vec<String> {
    let full_key: Vec<&str> = Vec::new();
    let mut keys = vec![full_key.join("_")];

    if params.has_dist() && params.has_group() {
        keys.push(format!("dist_{}_group_{}", params.dist, params.group));
        keys.push(format!("{}_{}", params.dist, params.group));
    }

    if params.has_dist() {
        keys.push(format!("dist_{}", params.dist));
        keys.push(params.dist.clone());
    }

    if params.has_group() {
        keys.push(format!("group_{}", params.group));
        keys.push(params.group.clone());
    }

    if params.has_os() {
        keys.push(format!("os_{}", params.os));
        keys.push(params.os.clone());
    }

    keys
}
