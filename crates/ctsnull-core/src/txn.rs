/// Run `create` for every input, all-or-nothing.
///
/// On the first failure, everything produced so far is handed to `undo` in
/// reverse order before the error is returned, so the state ends up exactly
/// as it was before the call.
pub fn allocate_all<S, I, T, E>(
    state: &mut S,
    inputs: impl IntoIterator<Item = I>,
    mut create: impl FnMut(&mut S, I) -> Result<T, E>,
    mut undo: impl FnMut(&mut S, T),
) -> Result<Vec<T>, E> {
    let mut done = Vec::new();
    for input in inputs {
        match create(state, input) {
            Ok(value) => done.push(value),
            Err(e) => {
                while let Some(value) = done.pop() {
                    undo(state, value);
                }
                return Err(e);
            }
        }
    }
    Ok(done)
}
