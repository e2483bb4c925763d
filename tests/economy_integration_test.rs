//! Integration test: the money loop.
//!
//! Wallet, bank, and shop working together: earn, bank, buy, equip,
//! consume. Also checks the conservation property — no successful or failed
//! operation creates or destroys currency.

use saga::{BankService, Character, InventoryService, Item, ShopService, StatBlock};

fn adventurer(name: &str, currency: u64) -> Character {
    let mut c = Character::new(name, StatBlock::new(60, 5, 2)).unwrap();
    c.add_currency(currency);
    c
}

#[test]
fn test_full_purchase_and_use_cycle() {
    let mut shop = ShopService::new("Village Armory");
    let mut bank = BankService::new("Village Bank");
    let mut inventory = InventoryService::new();
    let mut hero = adventurer("Hero", 200);

    shop.add_item_for_sale(Item::equippable("sword1", "Iron Sword", 5, 0).unwrap(), 100);
    shop.add_item_for_sale(Item::consumable("potion1", "Health Potion", 25).unwrap(), 40);

    // Stash savings, then buy the sword with what is left in the wallet.
    assert!(bank.deposit_from(&mut hero, 60));
    assert!(shop.sell_item_to("sword1", &mut hero, &mut inventory));
    assert_eq!(hero.currency(), 40);

    assert!(inventory.equip("sword1", &mut hero));
    assert_eq!(hero.attack, 10);

    // Get hurt, buy a potion, drink it.
    hero.take_damage(30);
    assert!(shop.sell_item_to("potion1", &mut hero, &mut inventory));
    assert_eq!(hero.currency(), 0);
    assert!(inventory.use_consumable("potion1", &mut hero));
    assert_eq!(hero.hp(), 55);

    // Broke, but the savings are still there.
    assert!(!shop.sell_item_to("missing", &mut hero, &mut inventory));
    assert!(bank.withdraw_to(&mut hero, 60));
    assert_eq!(hero.currency(), 60);
}

#[test]
fn test_underfunded_purchase_leaves_everything_untouched() {
    let mut shop = ShopService::new("Armory");
    let mut inventory = InventoryService::new();
    let mut buyer = adventurer("Pauper", 25);

    shop.add_item_for_sale(Item::consumable("potion1", "Health Potion", 20).unwrap(), 50);

    assert!(!shop.sell_item_to("potion1", &mut buyer, &mut inventory));
    assert_eq!(buyer.currency(), 25);
    assert!(inventory.list_items().is_empty());
    assert_eq!(shop.price_of("potion1"), Some(50));
}

#[test]
fn test_currency_is_conserved_across_bank_operations() {
    let mut bank = BankService::new("Vault");
    let mut alice = adventurer("Alice", 150);
    let mut bob = adventurer("Bob", 50);

    let total = |alice: &Character, bob: &Character, bank: &BankService| {
        alice.currency()
            + bob.currency()
            + bank.check_balance(alice)
            + bank.check_balance(bob)
    };
    assert_eq!(total(&alice, &bob, &bank), 200);

    assert!(bank.deposit_from(&mut alice, 120));
    assert_eq!(total(&alice, &bob, &bank), 200);

    assert!(bank.deposit_from(&mut bob, 10));
    assert!(bank.transfer_between(&alice, &bob, 45));
    assert_eq!(total(&alice, &bob, &bank), 200);

    assert!(bank.withdraw_to(&mut bob, 55));
    assert_eq!(total(&alice, &bob, &bank), 200);

    // Failed operations change nothing.
    assert!(!bank.deposit_from(&mut alice, 1_000));
    assert!(!bank.withdraw_to(&mut alice, 1_000));
    assert!(!bank.transfer_between(&bob, &alice, 1_000));
    assert_eq!(total(&alice, &bob, &bank), 200);

    assert_eq!(bank.check_balance(&alice), 75);
    assert_eq!(bank.check_balance(&bob), 0);
    assert_eq!(alice.currency(), 30);
    assert_eq!(bob.currency(), 95);
}

#[test]
fn test_shop_purchase_then_resell_is_not_a_thing_but_removal_is_safe() {
    // Buying moves the single unit of stock out of the shop; removing it
    // from the buyer's inventory while equipped must revert the bonuses.
    let mut shop = ShopService::new("Armory");
    let mut inventory = InventoryService::new();
    let mut hero = adventurer("Hero", 100);

    shop.add_item_for_sale(Item::equippable("shield1", "Tower Shield", 0, 7).unwrap(), 80);
    assert!(shop.sell_item_to("shield1", &mut hero, &mut inventory));
    assert!(inventory.equip("shield1", &mut hero));
    assert_eq!(hero.defense, 9);

    let removed = inventory.remove("shield1", &mut hero);
    assert!(removed.is_some());
    assert_eq!(hero.defense, 2);
    assert!(!inventory.is_equipped("shield1"));
}
