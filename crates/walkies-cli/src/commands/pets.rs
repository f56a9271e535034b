//! Pet commands.

use super::AppContext;
use anyhow::Result;
use walkies_core::gateway::PetGateway;
use walkies_core::pet::NewPet;

pub async fn list(ctx: &AppContext) -> Result<()> {
    let pets = ctx.api.list_pets().await?;
    if pets.is_empty() {
        println!("No pets registered yet. Add one with `walkies pets add`.");
        return Ok(());
    }
    for pet in pets {
        let age = pet
            .age
            .map(|a| format!(", {} years", a))
            .unwrap_or_default();
        println!("{}  {} ({}{})", pet.id, pet.name, pet.breed, age);
    }
    Ok(())
}

pub async fn add(
    ctx: &AppContext,
    name: String,
    breed: String,
    age: Option<u32>,
    notes: Option<String>,
) -> Result<()> {
    let new_pet = NewPet {
        name,
        breed,
        age,
        notes,
    };
    let pet = ctx.api.create_pet(&new_pet).await?;
    println!("Registered {} (id {}).", pet.name, pet.id);
    Ok(())
}
