string_enum! {
    /// VAT rates and VAT exemption keys.
    pub enum Vat {
        Zero => "0%",
        One => "1%",
        Five => "5%",
        Seven => "7%",
        Eighteen => "18%",
        TwentySeven => "27%",
        Aam => "AAM",
        Am => "AM",
        Eu => "EU",
        Euk => "EUK",
        FAfa => "F.AFA",
        Fad => "FAD",
        KAfa => "K.AFA",
        Maa => "MAA",
        Tam => "TAM",
        Akk => "ÁKK",
        Athk => "ÁTHK",
        Eut => "EUT",
        Eukt => "EUKT",
        Kbaet => "KBAET",
        Kbauk => "KBAUK",
        Eam => "EAM",
        Nam => "NAM",
        Atk => "ATK",
        Eufad37 => "EUFAD37",
        Eufade => "EUFADE",
        Eue => "EUE",
        Ho => "HO",
    }
}

string_enum! {
    /// Legal basis for a VAT exemption printed on the document.
    pub enum Entitlement {
        Aam => "AAM",
        Antiques => "ANTIQUES",
        Artwork => "ARTWORK",
        Atk => "ATK",
        Eam => "EAM",
        Eue => "EUE",
        Eufad37 => "EUFAD37",
        Eufade => "EUFADE",
        Ho => "HO",
        Kbaet => "KBAET",
        Nam1 => "NAM_1",
        Nam2 => "NAM_2",
        SecondHand => "SECOND_HAND",
        Tam => "TAM",
        TravelAgency => "TRAVEL_AGENCY",
    }
}
