//! Prompt text sent to the completion model.

/// Asks for five names for a pet of the given type and color. Values are
/// substituted as given.
pub fn build_pet_name_prompt(animal_type: &str, pet_color: &str) -> String {
    format!("I have a {animal_type} pet and I want a cool name for it, it is {pet_color} in color. Suggest me five cool names for my pet.")
}
